//! Built-in artifact catalog and the listing routes the home screen uses.

use std::fmt;
use std::str::FromStr;

use griot_contracts::slide_like::SlideLike;
use griot_model::{
    Artifact, ArtifactId, Category, ImageRef, ModelError, Slide, SlideId,
};

/// Number of artifacts shown on the home carousel.
pub const HOME_SLIDE_COUNT: usize = 5;

/// Filter applied by a listing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Listing id used in navigation (`"all"`, `"sculptures"`, ...).
    pub fn id(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.id(),
        }
    }

    pub fn matches(self, artifact: &Artifact) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => artifact.category == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CategoryFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Read-only, ordered collection of artifacts.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artifacts: Vec<Artifact>,
}

impl Catalog {
    pub fn new(artifacts: Vec<Artifact>) -> Self {
        Self { artifacts }
    }

    /// The five pieces shipped with the app.
    pub fn builtin() -> Self {
        let entries = [
            (
                "1",
                "Bronze Mask of Queen Mother Idia",
                "A 16th-century bronze mask from the Benin Empire, representing Queen Idia, the mother of Oba Esigie who ruled during the empire's golden age.",
                "Benin Empire (Modern-day Nigeria)",
                "16th Century",
                Category::Sculptures,
                "artifacts/benin-mask.png",
            ),
            (
                "2",
                "Great Sphinx of Giza",
                "A limestone statue depicting a mythical creature with the head of a human and the body of a lion, representing pharaonic power in ancient Egypt.",
                "Ancient Egypt",
                "Old Kingdom (c. 2686-2181 BCE)",
                Category::Sculptures,
                "artifacts/sphinx.png",
            ),
            (
                "3",
                "Aksumite Obelisk",
                "A granite stele from the ancient kingdom of Aksum, decorated with intricate geometric patterns and false doors.",
                "Kingdom of Aksum (Modern-day Ethiopia)",
                "4th Century CE",
                Category::Sculptures,
                "artifacts/aksumite-obelisk.png",
            ),
            (
                "4",
                "Timbuktu Manuscripts",
                "Ancient manuscripts from Timbuktu covering topics from astronomy to music, showcasing Africa's rich intellectual history.",
                "Mali Empire",
                "13th-17th Century",
                Category::Paintings,
                "artifacts/timbuktu-manuscript.png",
            ),
            (
                "5",
                "Terracotta Head",
                "A naturalistic terracotta head from the Nok culture, known for their sophisticated terracotta sculptures.",
                "Nok Culture (Modern-day Nigeria)",
                "500 BCE - 200 CE",
                Category::Sculptures,
                "artifacts/nok-head.png",
            ),
        ];

        let artifacts = entries
            .into_iter()
            .filter_map(
                |(id, name, description, origin, period, category, image)| {
                    Some(Artifact {
                        id: ArtifactId::new(id).ok()?,
                        name: name.to_string(),
                        description: description.to_string(),
                        origin: origin.to_string(),
                        period: period.to_string(),
                        category,
                        image: ImageRef::new(image),
                    })
                },
            )
            .collect();

        Self { artifacts }
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.id.as_str() == id)
    }

    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&Artifact> {
        self.artifacts.iter().filter(|a| filter.matches(a)).collect()
    }

    /// Case-insensitive substring match on name, origin and description.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Artifact> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.artifacts
            .iter()
            .filter(|a| {
                [&a.name, &a.origin, &a.description]
                    .into_iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// First `limit` artifacts as carousel slides, in catalog order.
    pub fn carousel_slides(&self, limit: usize) -> Vec<Slide> {
        self.artifacts
            .iter()
            .take(limit)
            .map(SlideLike::to_slide)
            .collect()
    }

    /// Listing a pressed home card navigates to: the category of the
    /// artifact behind the slide.
    pub fn route_for_card(&self, id: &SlideId) -> Option<CategoryFilter> {
        self.get(id.as_str())
            .map(|artifact| CategoryFilter::Only(artifact.category))
    }

    /// Listing the see-more control navigates to.
    pub fn route_for_see_more(&self) -> CategoryFilter {
        CategoryFilter::All
    }
}
