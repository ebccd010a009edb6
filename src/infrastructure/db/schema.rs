use sqlx::PgPool;

const PROJECTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id UUID PRIMARY KEY,
    title TEXT NOT NULL,
    subtitle TEXT,
    description TEXT NOT NULL,
    project_type TEXT NOT NULL,
    app_icon TEXT,
    start_date DATE NOT NULL,
    end_date DATE,
    is_ongoing BOOLEAN NOT NULL DEFAULT FALSE,
    technologies JSONB NOT NULL DEFAULT '[]',
    features JSONB NOT NULL DEFAULT '[]',
    code_snippets JSONB,
    github_url TEXT,
    demo_url TEXT,
    documentation_url TEXT,
    screenshots JSONB,
    detailed_description TEXT,
    challenges TEXT,
    achievements TEXT,
    lines_of_code INTEGER,
    commit_count INTEGER,
    contributor_count INTEGER NOT NULL DEFAULT 1,
    tags JSONB,
    status TEXT NOT NULL DEFAULT 'completed',
    priority INTEGER NOT NULL DEFAULT 0,
    client TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ
)
"#;

const COURSES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS courses (
    id SERIAL PRIMARY KEY,
    type TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    thumbnail TEXT,
    price INTEGER NOT NULL DEFAULT 0,
    duration TEXT,
    pages INTEGER,
    chapters INTEGER,
    rating DOUBLE PRECISION NOT NULL DEFAULT 0,
    reviews INTEGER NOT NULL DEFAULT 0,
    students INTEGER NOT NULL DEFAULT 0,
    level TEXT,
    instructor_name TEXT,
    instructor_bio TEXT,
    what_you_learn JSONB,
    curriculum JSONB,
    requirements JSONB,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ
)
"#;

const INQUIRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS inquiries (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    company TEXT,
    message TEXT,
    service_type TEXT,
    selected_features JSONB,
    additional_features TEXT,
    estimated_price INTEGER,
    status TEXT NOT NULL DEFAULT 'pending',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ
)
"#;

/// Creates the three tables if they do not exist yet. Called at startup; an
/// unreachable database is reported to the caller, which logs and continues.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in [PROJECTS_TABLE, COURSES_TABLE, INQUIRIES_TABLE] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
