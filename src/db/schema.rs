diesel::table! {
    users (id) {
        id -> Int4,
        #[max_length = 120]
        name -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 255]
        password_hash -> Varchar,
        #[max_length = 20]
        role -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    animals (id) {
        id -> Int4,
        #[max_length = 120]
        name -> Varchar,
        #[max_length = 60]
        species -> Varchar,
        #[max_length = 120]
        breed -> Nullable<Varchar>,
        age -> Nullable<Int4>,
        #[max_length = 120]
        health_status -> Nullable<Varchar>,
        admission_date -> Nullable<Date>,
        #[max_length = 30]
        adoption_status -> Varchar,
    }
}

diesel::table! {
    adoptions (id) {
        id -> Int4,
        animal_id -> Int4,
        adopter_id -> Int4,
        admin_notes -> Nullable<Text>,
        #[max_length = 30]
        status -> Varchar,
        request_date -> Timestamptz,
    }
}

diesel::table! {
    donations (id) {
        id -> Int4,
        donor_id -> Int4,
        #[max_length = 40]
        donation_type -> Varchar,
        amount -> Float8,
    }
}

diesel::joinable!(adoptions -> animals (animal_id));
diesel::joinable!(adoptions -> users (adopter_id));
diesel::joinable!(donations -> users (donor_id));

diesel::allow_tables_to_appear_in_same_query!(adoptions, animals, donations, users,);
