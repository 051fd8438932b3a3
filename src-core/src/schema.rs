diesel::table! {
    persons (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    assets (id) {
        id -> Integer,
        person_id -> Integer,
        name -> Text,
        description -> Nullable<Text>,
        value -> Double,
        acquired_date -> Date,
        created_at -> Timestamp,
    }
}

diesel::joinable!(assets -> persons (person_id));

diesel::allow_tables_to_appear_in_same_query!(assets, persons);
