//! Built-in sample schema for the demo

use schema_form::{to_options, FieldKind, FieldSchema, OptionRecord, StringRule};
use serde_json::json;

/// Sample form: personal data, a role preset to `ADMIN`, interests and a plan
pub fn sample_schema() -> Vec<FieldSchema> {
    let roles = to_options(
        "name",
        "code",
        &[
            json!({"name": "Admin", "code": "ADMIN"}),
            json!({"name": "User", "code": "USER"}),
        ],
    );

    vec![
        FieldSchema::new("name", FieldKind::LettersOnly, "Nome")
            .with_value("Eduardo Brandes")
            .with_length(Some(1), Some(40))
            .with_rule(StringRule::new().required("Informe o nome")),
        FieldSchema::new("age", FieldKind::DigitsOnly, "Idade")
            .with_value("")
            .with_length(None, Some(3))
            .with_rule(StringRule::new().required("Informe a idade")),
        FieldSchema::new("email", FieldKind::Email, "Email")
            .with_value("")
            .with_rule(
                StringRule::new()
                    .required("Informe o email")
                    .email("Email inválido"),
            ),
        FieldSchema::new("money", FieldKind::Currency, "Valor")
            .with_value("")
            .with_rule(StringRule::new().required("Informe o valor")),
        FieldSchema::new("role", FieldKind::SingleSelect, "Roles")
            .with_value("")
            .with_options(roles)
            .with_rule(StringRule::new().required("Escolha um papel"))
            .select_option("ADMIN"),
        FieldSchema::new("interests", FieldKind::MultiSelectCheckbox, "Interesses")
            .with_options(vec![
                OptionRecord::new("Rust", "rust").checked(),
                OptionRecord::new("Formulários", "forms"),
                OptionRecord::new("Terminais", "tui"),
            ])
            .with_rule(StringRule::new().required("Escolha ao menos um"))
            .horizontal(),
        FieldSchema::new("plan", FieldKind::RadioChoice, "Plano")
            .with_value("")
            .with_options(vec![
                OptionRecord::new("Gratuito", "free"),
                OptionRecord::new("Pro", "pro"),
            ])
            .with_rule(StringRule::new().required("Escolha um plano"))
            .horizontal(),
    ]
}
