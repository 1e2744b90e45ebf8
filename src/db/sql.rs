/// Idempotent DDL for the `users` table
pub fn create_table(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    \
         id SERIAL PRIMARY KEY,\n    \
         name VARCHAR(100),\n    \
         email VARCHAR(100),\n    \
         created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP\n\
         );",
        table
    )
}

/// Rows inserted by `create-data`
pub const SEED_ROWS: [(&str, &str); 3] = [
    ("Akio Morita", "akio@invo.com"),
    ("Masaru Ibuka", "masaru@invo.com"),
    ("Hayato Ikeda", "hayato@invo.com"),
];

pub fn insert_seed_rows(table: &str) -> String {
    let values = SEED_ROWS
        .iter()
        .map(|(name, email)| format!("({}, {})", quote_literal(name), quote_literal(email)))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("INSERT INTO {} (name, email) VALUES\n{};", table, values)
}

pub fn select_all(table: &str) -> String {
    format!("SELECT * FROM {};", table)
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_table_declares_all_columns() {
        let sql = create_table("users");
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS users ("));
        assert!(sql.contains("id SERIAL PRIMARY KEY"));
        assert!(sql.contains("name VARCHAR(100)"));
        assert!(sql.contains("email VARCHAR(100)"));
        assert!(sql.contains("created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP"));
        assert!(sql.ends_with(");"));
    }

    #[test]
    fn insert_lists_exactly_three_rows() {
        let sql = insert_seed_rows("users");
        assert_eq!(
            sql,
            "INSERT INTO users (name, email) VALUES\n\
             ('Akio Morita', 'akio@invo.com'),\n\
             ('Masaru Ibuka', 'masaru@invo.com'),\n\
             ('Hayato Ikeda', 'hayato@invo.com');"
        );
    }

    #[test]
    fn quote_literal_doubles_quotes() {
        assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
    }

    #[test]
    fn select_is_read_only() {
        assert_eq!(select_all("users"), "SELECT * FROM users;");
    }
}
