//! Diesel schema for planning persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Internal project identifier.
        id -> Uuid,
        /// Project name. Length limits belong to the validators.
        name -> Text,
        /// Free-form description.
        description -> Text,
        /// Planned start date.
        start_date -> Timestamptz,
        /// Optional planned end date.
        end_date -> Nullable<Timestamptz>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Sprint records, removed with their project.
    sprints (id) {
        /// Internal sprint identifier.
        id -> Uuid,
        /// Sprint name.
        name -> Text,
        /// Sprint goal.
        goal -> Text,
        /// Sprint start date.
        start_date -> Timestamptz,
        /// Sprint end date.
        end_date -> Timestamptz,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Owning project.
        project_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records, removed with their project and detached from deleted
    /// sprints.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Task title.
        title -> Text,
        /// Free-form description.
        description -> Text,
        /// Priority.
        #[max_length = 50]
        priority -> Varchar,
        /// Workflow status.
        #[max_length = 50]
        status -> Varchar,
        /// Estimate in hours.
        estimated_hours -> Int4,
        /// Logged hours.
        actual_hours -> Int4,
        /// Owning project.
        project_id -> Uuid,
        /// Sprint the task is planned into.
        sprint_id -> Nullable<Uuid>,
        /// Assigned user reference.
        assigned_to -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(sprints -> projects (project_id));
diesel::joinable!(tasks -> projects (project_id));
diesel::joinable!(tasks -> sprints (sprint_id));

diesel::allow_tables_to_appear_in_same_query!(projects, sprints, tasks);
