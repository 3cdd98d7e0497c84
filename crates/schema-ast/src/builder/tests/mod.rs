mod pagination_info_types_tests;
