use utoipa::ToSchema;

/// Multipart form for creating and updating companies.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CompanyForm {
    /// Company name, 1 to 255 characters.
    name: String,

    /// Contact email.
    email: Option<String>,

    /// Company website URL.
    website: Option<String>,

    /// Image file (jpg, jpeg, png, gif, bmp, svg, webp), at most 2 MiB.
    #[schema(value_type = Option<String>, format = Binary)]
    logo: Option<Vec<u8>>,
}
