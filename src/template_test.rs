use super::*;

// =============================================================
// Catalog structure
// =============================================================

#[test]
fn every_mode_starts_with_a_blank_preset() {
    for mode in [CanvasMode::Shapes, CanvasMode::Erd, CanvasMode::Architecture] {
        let catalog = catalog(mode);
        assert!(!catalog.is_empty());
        assert_eq!(catalog[0].name, "Blank Canvas");
        assert!(catalog[0].entities.is_empty());
        assert!(catalog[0].relationships.is_empty());
    }
}

#[test]
fn preset_names_are_unique_per_mode() {
    for mode in [CanvasMode::Shapes, CanvasMode::Erd, CanvasMode::Architecture] {
        let names: Vec<String> = catalog(mode).into_iter().map(|t| t.name).collect();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn preset_relationships_reference_preset_entities() {
    for mode in [CanvasMode::Shapes, CanvasMode::Erd, CanvasMode::Architecture] {
        for template in catalog(mode) {
            for r in &template.relationships {
                assert!(
                    template.entities.iter().any(|e| e.id == r.from),
                    "{}: dangling from", template.name,
                );
                assert!(
                    template.entities.iter().any(|e| e.id == r.to),
                    "{}: dangling to", template.name,
                );
            }
        }
    }
}

#[test]
fn preset_ids_are_unique_within_a_template() {
    for mode in [CanvasMode::Shapes, CanvasMode::Erd, CanvasMode::Architecture] {
        for template in catalog(mode) {
            let mut ids: Vec<u64> = template
                .entities
                .iter()
                .map(|e| e.id)
                .chain(template.relationships.iter().map(|r| r.id))
                .collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), before, "{}: duplicate ids", template.name);
        }
    }
}

// =============================================================
// E-commerce preset (the documented ERD example)
// =============================================================

#[test]
fn ecommerce_preset_has_three_tables_and_two_relationships() {
    let catalog = catalog(CanvasMode::Erd);
    let preset = catalog.iter().find(|t| t.name == "E-commerce").unwrap();

    let names: Vec<&str> = preset
        .entities
        .iter()
        .filter_map(|e| match &e.body {
            EntityBody::Table { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["Users", "Orders", "Products"]);
    assert_eq!(preset.entities.len(), 3);

    assert_eq!(preset.relationships.len(), 2);
    assert_eq!(preset.relationships[0].cardinality, Cardinality::OneToMany);
    assert_eq!(preset.relationships[1].cardinality, Cardinality::ManyToMany);

    // Users → Orders, Orders → Products.
    let users = preset.entities[0].id;
    let orders = preset.entities[1].id;
    let products = preset.entities[2].id;
    assert_eq!((preset.relationships[0].from, preset.relationships[0].to), (users, orders));
    assert_eq!((preset.relationships[1].from, preset.relationships[1].to), (orders, products));
}

#[test]
fn ecommerce_users_table_sits_at_fifty_fifty() {
    let catalog = catalog(CanvasMode::Erd);
    let preset = catalog.iter().find(|t| t.name == "E-commerce").unwrap();
    let users = &preset.entities[0];
    assert!((users.x - 50.0).abs() < f64::EPSILON);
    assert!((users.y - 50.0).abs() < f64::EPSILON);
}

// =============================================================
// Serde schema
// =============================================================

#[test]
fn template_round_trips_through_json() {
    for template in catalog(CanvasMode::Erd) {
        let json = serde_json::to_string(&template).unwrap();
        let back: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(back, template);
    }
}

#[test]
fn entities_keep_key_flags_through_serialization() {
    let catalog = catalog(CanvasMode::Erd);
    let preset = catalog.iter().find(|t| t.name == "E-commerce").unwrap();
    let value = serde_json::to_value(preset).unwrap();
    let orders_columns = &value["entities"][1]["attributes"];
    assert_eq!(orders_columns[0]["primary_key"], serde_json::json!(true));
    assert_eq!(orders_columns[1]["foreign_key"], serde_json::json!(true));
}
