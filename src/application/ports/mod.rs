pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type SlugGeneratorPort = dyn util::SlugGenerator;
