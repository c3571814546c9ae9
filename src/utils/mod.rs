pub mod identifier_case;
pub mod value_literal;
