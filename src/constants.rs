pub const SITE_BASE_URL: &str = "https://www.kimppop.site";
pub const SITE_TITLE: &str = "Kimppop Portfolio";
pub const SITE_DESCRIPTION: &str =
    "Personal portfolio of a full-stack developer. Project showcases, courses and development services.";
pub const SITE_CONTACT_EMAIL: &str = "contact@kimppop.site";
