//! Document-level OpenAPI metadata. Routes contribute their own paths and schemas.

use sheetwise_domain::constants::{
    API_CONTACT, API_DESCRIPTION, API_LICENSE, API_TERMS_OF_SERVICE, API_TITLE, API_VERSION,
    TAGS_METADATA, TagMetadata,
};
use utoipa::openapi::external_docs::ExternalDocsBuilder;
use utoipa::openapi::info::{ContactBuilder, InfoBuilder, LicenseBuilder};
use utoipa::openapi::tag::{Tag, TagBuilder};
use utoipa::{Modify, OpenApi};

/// Base document that routers are merged into.
#[derive(OpenApi)]
#[openapi(modifiers(&ApiMetadata))]
pub struct ApiDoc;

/// Fills the service info and the ordered tag list.
#[derive(Debug, Clone, Copy)]
pub struct ApiMetadata;

impl Modify for ApiMetadata {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info = InfoBuilder::new()
            .title(API_TITLE)
            .description(Some(API_DESCRIPTION))
            .version(API_VERSION)
            .terms_of_service(Some(API_TERMS_OF_SERVICE))
            .contact(Some(
                ContactBuilder::new()
                    .name(Some(API_CONTACT.name))
                    .url(Some(API_CONTACT.url))
                    .email(Some(API_CONTACT.email))
                    .build(),
            ))
            .license(Some(
                LicenseBuilder::new().name(API_LICENSE.name).url(Some(API_LICENSE.url)).build(),
            ))
            .build();

        openapi.tags = Some(TAGS_METADATA.iter().map(tag).collect());
    }
}

fn tag(meta: &TagMetadata) -> Tag {
    TagBuilder::new()
        .name(meta.name)
        .description(Some(meta.description))
        .external_docs(Some(
            ExternalDocsBuilder::new()
                .url(meta.external_docs.url)
                .description(Some(meta.external_docs.description))
                .build(),
        ))
        .build()
}
