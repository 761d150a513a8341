use std::collections::HashMap;

use tablescout_core::{PromptTemplate, Value};

#[test]
fn renders_template_with_vars() {
    let tmpl = PromptTemplate::new("Hungry in {{city}}?");
    let mut vars = HashMap::new();
    vars.insert("city".to_string(), Value::from("Lisbon"));
    let rendered = tmpl.render(&vars).expect("render");
    assert_eq!(rendered, "Hungry in Lisbon?");
}

#[test]
fn missing_vars_render_empty() {
    let tmpl = PromptTemplate::new("{{greeting}} {{name}}");
    let mut vars = HashMap::new();
    vars.insert("greeting".to_string(), Value::from("Hello"));
    let rendered = tmpl.render(&vars).expect("render");
    assert_eq!(rendered, "Hello ");
}

#[test]
fn non_string_values_use_json_form() {
    let tmpl = PromptTemplate::new("top {{limit}} picks");
    let mut vars = HashMap::new();
    vars.insert("limit".to_string(), Value::from(5));
    let rendered = tmpl.render(&vars).expect("render");
    assert_eq!(rendered, "top 5 picks");
}
