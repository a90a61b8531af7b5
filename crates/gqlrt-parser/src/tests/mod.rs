mod lexer_tests;
mod schema_parser_tests;
mod type_ref_tests;
mod value_tests;
