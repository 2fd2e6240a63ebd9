use griot_core::catalog::{Catalog, CategoryFilter};
use griot_model::Artifact;

pub fn list(filter: CategoryFilter) {
    let catalog = Catalog::builtin();
    print_artifacts(&catalog.by_category(filter));
}

pub fn search(query: &str) {
    let catalog = Catalog::builtin();
    let hits = catalog.search(query);
    if hits.is_empty() {
        println!("no artifacts match '{query}'");
        return;
    }
    print_artifacts(&hits);
}

pub(crate) fn print_artifacts(artifacts: &[&Artifact]) {
    if artifacts.is_empty() {
        println!("(none)");
    }
    for artifact in artifacts {
        println!(
            "{:>3}  {}  [{}]  {}, {}",
            artifact.id.as_str(),
            artifact.name,
            artifact.category,
            artifact.origin,
            artifact.period
        );
    }
}
