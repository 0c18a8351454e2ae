//! Create/edit/delete lifecycle behind the modal forms

pub mod controller;
pub mod handle;

pub use controller::{DeleteOutcome, FormController, FormEntity, FormMode, FormState, SubmitOutcome};
pub use handle::FormHandle;
