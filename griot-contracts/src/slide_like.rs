use griot_model::{Artifact, ImageRef, Slide, SlideId};

/// Anything that can be presented as a carousel slide.
pub trait SlideLike {
    fn slide_id(&self) -> SlideId;
    fn slide_title(&self) -> &str;
    fn slide_description(&self) -> &str;
    fn slide_image(&self) -> &ImageRef;

    fn to_slide(&self) -> Slide {
        Slide::new(
            self.slide_id(),
            self.slide_title(),
            self.slide_description(),
            self.slide_image().clone(),
        )
    }
}

impl SlideLike for Slide {
    fn slide_id(&self) -> SlideId {
        self.id.clone()
    }

    fn slide_title(&self) -> &str {
        &self.title
    }

    fn slide_description(&self) -> &str {
        &self.description
    }

    fn slide_image(&self) -> &ImageRef {
        &self.image
    }
}

/// The home carousel titles artifacts by their name.
impl SlideLike for Artifact {
    fn slide_id(&self) -> SlideId {
        self.id.to_slide_id()
    }

    fn slide_title(&self) -> &str {
        &self.name
    }

    fn slide_description(&self) -> &str {
        &self.description
    }

    fn slide_image(&self) -> &ImageRef {
        &self.image
    }
}
