use super::*;

mod quote_literal;
