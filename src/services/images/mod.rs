mod service;
mod types;
mod validation;


pub use service::{ImageService, ImageServiceImpl};
pub use types::{
    ImageData, ImageEditRequest, ImageGenerationRequest, ImageInput, ImageQuality,
    ImageResponse, ImageResponseFormat, ImageSize, ImageStyle, ImageVariationRequest,
};
pub use validation::ImageRequestValidator;
