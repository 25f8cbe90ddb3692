use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Catalog,
    Comparison,
    Guide,
    Appointments,
    Contact,
}
