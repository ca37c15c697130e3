pub mod exercises;
pub mod professors;
pub mod training_exercises;
pub mod training_registrations;
pub mod trainings;
pub mod users;

pub use exercises::Entity as Exercises;
pub use exercises::Model as Exercise;
pub use professors::Entity as Professors;
pub use professors::Model as Professor;
pub use training_exercises::Entity as TrainingExercises;
pub use training_exercises::Model as TrainingExercise;
pub use training_registrations::Entity as TrainingRegistrations;
pub use training_registrations::Model as TrainingRegistration;
pub use trainings::Entity as Trainings;
pub use trainings::Model as Training;
pub use users::Entity as Users;
pub use users::Model as User;
