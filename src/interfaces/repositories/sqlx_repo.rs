use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCourseRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxInquiryRepo {
    pub pool: PgPool,
}
