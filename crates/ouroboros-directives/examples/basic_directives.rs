//! Basic Directives Example
//!
//! This example shows directive validation over a simple record.
//!
//! Run with:
//! ```bash
//! cargo run -p ouroboros-directives --example basic_directives
//! ```

use ouroboros_directives::{validate, ErrorKind, Field, Record, ValidateError, Value};

fn main() {
    println!("Basic Directives Example");
    println!("========================\n");

    let user = Record::named("User")
        .field(Field::new("ID", "3f2a9c").tag(r#"json:"id" validate:"len:6""#))
        .field(Field::new("Name", "Al").tag(r#"json:"name" validate:"min:3""#))
        .field(Field::new("Age", 150).tag(r#"json:"age" validate:"max:120""#))
        .field(Field::new("Roles", vec!["admin", "root"]).directive("in:admin,user"))
        .field(Field::new("token", "s3cr3t").directive("min:1").unexported());

    match validate(&Value::from(user)) {
        Ok(()) => println!("  Valid"),
        Err(ValidateError::NotStruct { kind }) => println!("  Not a struct: {}", kind),
        Err(err @ ValidateError::Fields(_)) => {
            println!("  {} error(s):", err.field_errors().len());
            for error in err.field_errors() {
                println!("    {:<6} [{:?}] {}", error.field, error.kind(), error.cause);
            }
            println!();
            println!("  Has min failure: {}", err.is(ErrorKind::MinFailed));
        }
    }
}
