use heck::{ToLowerCamelCase, ToSnakeCase};

/// A schema identifier, stored as its snake_case parts so that the
/// backend's camelCase names and Rust's snake_case names compare equal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = src
            .to_snake_case()
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn camel_case(&self) -> String {
        self.snake_case().to_lower_camel_case()
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }
}
