//! DTOs for trainings_sea adapter.

#[derive(Debug, Clone)]
pub struct TrainingCreate {
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub professor_id: i64,
    pub repetitions: i32,
    pub sets: i32,
}

/// Partial update. The owner (`user_id`) is never changed through here.
#[derive(Debug, Clone, Default)]
pub struct TrainingUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub professor_id: Option<i64>,
    pub repetitions: Option<i32>,
    pub sets: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct TrainingExerciseCreate {
    pub training_id: i64,
    pub exercise_id: i64,
    pub repetitions: i32,
    pub sets: i32,
}
