//! Quiz presentation logic
//!
//! Pure functions from a quiz document and a slice of session state to a
//! view model. Drawing the view model is left to the `ui` module.

pub mod grouping;
pub mod view;

pub use grouping::group_by_section;
pub use view::{
    FocusTarget, OptionMark, OptionView, QuestionView, QuizControl, QuizView, RenderContext,
    Reveal, SectionView,
};
