mod fixtures;
mod link_index_tests;
