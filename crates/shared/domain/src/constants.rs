//! Static API metadata: documentation tags, service info and well-known paths.

/// Prefix every route is mounted under.
pub const API_ROOT: &str = "/api";
/// Machine-readable API description, relative to [`API_ROOT`].
pub const OPENAPI_PATH: &str = "/openapi.json";
/// Interactive documentation UI, relative to [`API_ROOT`].
pub const DOCS_PATH: &str = "/docs";

/// Body returned by the informational route.
pub const INFO_DETAIL: &str = "view /docs for documentation.";

pub const TESTING_TAG: &str = "Testing";
pub const SUMMARIZE_TAG: &str = "Summarize";

pub const API_TITLE: &str = "SheetWise Backend";
pub const API_DESCRIPTION: &str = "An API that summarizes excel spreadsheets";
pub const API_VERSION: &str = "0.0.1";
pub const API_TERMS_OF_SERVICE: &str = "https://vanillauys.vercel.app/about";

/// Maintainer contact published in the API description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub name: &'static str,
    pub url: &'static str,
    pub email: &'static str,
}

/// License published in the API description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct License {
    pub name: &'static str,
    pub url: &'static str,
}

pub const API_CONTACT: Contact = Contact {
    name: "Wihan Uys",
    url: "https://vanillauys.vercel.app/about",
    email: "wihan@duck.com",
};

pub const API_LICENSE: License =
    License { name: "MIT", url: "https://spdx.org/licenses/MIT.html" };

/// External documentation link attached to a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalDocs {
    pub description: &'static str,
    pub url: &'static str,
}

/// Documentation-only grouping label for routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub external_docs: ExternalDocs,
}

/// Every tag published in the API description, in display order.
pub const TAGS_METADATA: &[TagMetadata] = &[
    TagMetadata {
        name: TESTING_TAG,
        description: "Routes to test functionality.",
        external_docs: ExternalDocs {
            description: "FastAPI Documentation",
            url: "https://fastapi.tiangolo.com/",
        },
    },
    TagMetadata {
        name: SUMMARIZE_TAG,
        description: "Routes to summarize excel sheets with text.",
        external_docs: ExternalDocs {
            description: "OpenAI Docs",
            url: "https://platform.openai.com/",
        },
    },
];
