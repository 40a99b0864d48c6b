// Simplified Diesel schema shared by the demo entities and the
// integration tests. Tablas: visitors, addresses
diesel::table! {
    visitors (id) {
        id -> Text,
        name -> Text,
        created_at_ts -> BigInt,
    }
}
diesel::table! {
    addresses (id) {
        id -> Text,
        visitor_id -> Text,
        city -> Text,
    }
}
diesel::allow_tables_to_appear_in_same_query!(visitors, addresses);
