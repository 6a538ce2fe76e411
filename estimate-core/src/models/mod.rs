mod active_view;
mod line_item;
mod material_category;
mod material_template;
mod party_info;
mod scalar_inputs;

pub use active_view::ActiveView;
pub use line_item::{LineItem, LineItemDraft, LineItemField};
pub use material_category::{
    AreaCoefficient, AreaCoefficients, MaterialCategory, ParseCategoryError,
};
pub use material_template::MaterialTemplate;
pub use party_info::{PartyField, PartyInfo};
pub use scalar_inputs::{ScalarField, ScalarInputs};
