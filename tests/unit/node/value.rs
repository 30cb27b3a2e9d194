use super::*;

#[test]
fn missing_inputs_are_input_errors() {
    let inputs = Inputs::new();
    assert!(matches!(
        inputs.str("points"),
        Err(MaskforgeError::Input(_))
    ));
}

#[test]
fn typed_accessors_return_stored_values() {
    let inputs = Inputs::new()
        .with("points", Value::Str("0:(0.0)".to_string()))
        .with("invert", Value::Bool(true))
        .with("frames", Value::Int(16))
        .with("weights", Value::FloatArray(vec![0.0, 1.0]));

    assert_eq!(inputs.str("points").unwrap(), "0:(0.0)");
    assert!(inputs.boolean("invert").unwrap());
    assert_eq!(inputs.int("frames").unwrap(), 16);
    assert_eq!(inputs.float_array("weights").unwrap(), vec![0.0, 1.0]);
}

#[test]
fn mismatches_name_field_and_kinds() {
    let inputs = Inputs::new().with("frames", Value::Str("sixteen".to_string()));
    let err = inputs.int("frames").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'frames'"));
    assert!(msg.contains("int"));
    assert!(msg.contains("string"));
}

#[test]
fn lone_float_promotes_to_one_element_array() {
    let inputs = Inputs::new().with("float_array", Value::Float(0.5));
    assert_eq!(inputs.float_array("float_array").unwrap(), vec![0.5]);
}

#[test]
fn insert_replaces_previous_entry() {
    let mut inputs = Inputs::new();
    inputs.insert("frames", Value::Int(8));
    inputs.insert("frames", Value::Int(24));
    assert_eq!(inputs.int("frames").unwrap(), 24);
}
