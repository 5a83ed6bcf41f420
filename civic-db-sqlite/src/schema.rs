///////////////////////////////////////////////////////////////////////
// Profiles
///////////////////////////////////////////////////////////////////////

table! {
    profiles (rowid) {
        rowid -> BigInt,
        id -> Text,
        email -> Text,
        password -> Text,
        role -> SmallInt,
        name -> Nullable<Text>,
        phone -> Nullable<Text>,
        avatar_url -> Nullable<Text>,
        organization_name -> Nullable<Text>,
        location_text -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        is_complete -> Bool,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Issues
///////////////////////////////////////////////////////////////////////

table! {
    issues (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        description -> Text,
        category -> SmallInt,
        priority -> SmallInt,
        status -> SmallInt,
        location_text -> Text,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        contact_info -> Nullable<Text>,
        reporter_id -> Nullable<Text>,
        reporter_name -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    issue_photo (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        url -> Text,
    }
}

joinable!(issue_photo -> issues (parent_rowid));

allow_tables_to_appear_in_same_query!(issues, issue_photo, profiles,);
