mod tests_end_to_end;
mod tests_index_properties;
mod tests_json_source;
