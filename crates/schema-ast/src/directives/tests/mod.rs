mod directive_registry_tests;
