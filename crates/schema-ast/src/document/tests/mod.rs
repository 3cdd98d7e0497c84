mod document_ast_tests;
mod partial_parser_tests;
