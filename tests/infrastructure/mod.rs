mod gemini_parser_test;
