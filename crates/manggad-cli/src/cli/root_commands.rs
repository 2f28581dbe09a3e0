use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search theses by text, year, department, and program.
    Search(SearchArgs),
    /// List every thesis in submission order.
    List,
    /// Get a thesis by ID.
    Get { id: String },
    /// Recommend a thesis (adds one to its recommendation count).
    Recommend { id: String },
    /// Submit a new thesis.
    Submit(SubmitArgs),
    /// Load theses from a JSON array file.
    Seed(SeedArgs),
    /// Print the department and program vocabularies.
    Facets,
}

/// Arguments for `manggad search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Free text matched against title, abstract, keywords, and authors.
    pub text: Option<String>,
    /// Exact year of submission.
    #[arg(long)]
    pub year: Option<i32>,
    /// Department label or code (repeatable).
    #[arg(long = "department")]
    pub departments: Vec<String>,
    /// Program label or code (repeatable).
    #[arg(long = "program")]
    pub programs: Vec<String>,
}

/// Arguments for `manggad submit`.
#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    #[arg(long)]
    pub title: String,
    /// Department label or code.
    #[arg(long)]
    pub department: String,
    /// Program label or code.
    #[arg(long)]
    pub program: String,
    #[arg(long = "abstract")]
    pub abstract_text: Option<String>,
    /// Comma- or semicolon-separated keywords.
    #[arg(long)]
    pub keywords: Option<String>,
    /// Comma- or semicolon-separated author names.
    #[arg(long)]
    pub authors: Option<String>,
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub degree_awarded: Option<i32>,
    #[arg(long)]
    pub cover_image_url: Option<String>,
}

/// Arguments for `manggad seed`.
#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// JSON file holding an array of thesis records.
    pub file: PathBuf,
}
