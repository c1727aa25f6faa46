// src/db/schema.rs
//
// DDL e dados de exemplo aplicados pelo `init-db`. A ordem importa: tipos,
// tabelas (pais antes dos filhos), índices e por fim as sementes.

/// Um comando da inicialização, com nome para os logs de erro.
#[derive(Debug, Clone, Copy)]
pub struct InitStatement {
    pub name: &'static str,
    pub sql: &'static str,
}

const fn stmt(name: &'static str, sql: &'static str) -> InitStatement {
    InitStatement { name, sql }
}

pub const SCHEMA_STATEMENTS: &[InitStatement] = &[
    // CREATE TYPE não tem IF NOT EXISTS
    stmt(
        "type lead_status",
        r#"
        DO $$ BEGIN
            CREATE TYPE lead_status AS ENUM ('nuevo', 'contactado', 'negociación', 'cerrado', 'perdido');
        EXCEPTION WHEN duplicate_object THEN NULL;
        END $$
        "#,
    ),
    stmt(
        "type message_direction",
        r#"
        DO $$ BEGIN
            CREATE TYPE message_direction AS ENUM ('inbound', 'outbound');
        EXCEPTION WHEN duplicate_object THEN NULL;
        END $$
        "#,
    ),
    stmt(
        "table users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'user' CHECK (btrim(role) <> ''),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    stmt(
        "table leads",
        r#"
        CREATE TABLE IF NOT EXISTS leads (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT,
            phone TEXT,
            company TEXT,
            status lead_status NOT NULL DEFAULT 'nuevo',
            source TEXT,
            assigned_to INTEGER REFERENCES users(id) ON DELETE SET NULL,
            notes TEXT,
            last_contact TIMESTAMP WITH TIME ZONE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    stmt(
        "table activities",
        r#"
        CREATE TABLE IF NOT EXISTS activities (
            id SERIAL PRIMARY KEY,
            lead_id INTEGER NOT NULL REFERENCES leads(id) ON DELETE CASCADE,
            user_id INTEGER NOT NULL REFERENCES users(id),
            type TEXT NOT NULL,
            notes TEXT,
            scheduled_for TIMESTAMP WITH TIME ZONE,
            completed BOOLEAN NOT NULL DEFAULT FALSE,
            completed_at TIMESTAMP WITH TIME ZONE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT activities_completed_at_check CHECK (completed OR completed_at IS NULL)
        )
        "#,
    ),
    stmt(
        "table messages",
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id SERIAL PRIMARY KEY,
            lead_id INTEGER NOT NULL REFERENCES leads(id) ON DELETE CASCADE,
            content TEXT NOT NULL,
            direction message_direction NOT NULL,
            channel TEXT NOT NULL,
            read BOOLEAN NOT NULL DEFAULT FALSE,
            metadata JSONB,
            sent_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    stmt(
        "table surveys",
        r#"
        CREATE TABLE IF NOT EXISTS surveys (
            id SERIAL PRIMARY KEY,
            lead_id INTEGER NOT NULL REFERENCES leads(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            responses JSONB,
            sent_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            completed_at TIMESTAMP WITH TIME ZONE,
            CONSTRAINT surveys_responses_check CHECK (completed_at IS NULL OR responses IS NOT NULL)
        )
        "#,
    ),
    stmt(
        "table dashboard_stats",
        r#"
        CREATE TABLE IF NOT EXISTS dashboard_stats (
            id SERIAL PRIMARY KEY,
            total_leads INTEGER NOT NULL DEFAULT 0,
            new_leads_this_month INTEGER NOT NULL DEFAULT 0,
            converted_leads_this_month INTEGER NOT NULL DEFAULT 0,
            total_messages INTEGER NOT NULL DEFAULT 0,
            response_rate INTEGER NOT NULL DEFAULT 0,
            avg_response_time INTEGER NOT NULL DEFAULT 0,
            leads_per_source JSONB,
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    stmt(
        "table gemini_settings",
        r#"
        CREATE TABLE IF NOT EXISTS gemini_settings (
            id SERIAL PRIMARY KEY,
            model TEXT NOT NULL DEFAULT 'gemini-pro',
            profession_level TEXT NOT NULL DEFAULT 'professional',
            temperature INTEGER NOT NULL DEFAULT 70 CHECK (temperature BETWEEN 0 AND 100),
            max_tokens INTEGER NOT NULL DEFAULT 500 CHECK (max_tokens > 0),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    // Índices
    stmt("index idx_leads_status", "CREATE INDEX IF NOT EXISTS idx_leads_status ON leads(status)"),
    stmt("index idx_leads_assigned_to", "CREATE INDEX IF NOT EXISTS idx_leads_assigned_to ON leads(assigned_to)"),
    stmt("index idx_activities_lead_id", "CREATE INDEX IF NOT EXISTS idx_activities_lead_id ON activities(lead_id)"),
    stmt("index idx_activities_user_id", "CREATE INDEX IF NOT EXISTS idx_activities_user_id ON activities(user_id)"),
    stmt("index idx_messages_lead_id", "CREATE INDEX IF NOT EXISTS idx_messages_lead_id ON messages(lead_id)"),
    stmt("index idx_messages_sent_at", "CREATE INDEX IF NOT EXISTS idx_messages_sent_at ON messages(sent_at)"),
];

// Sementes: username é a chave natural do admin; o resto só entra
// quando a tabela está vazia, para que rodar de novo não duplique nada.
pub const SEED_STATEMENTS: &[InitStatement] = &[
    stmt(
        "seed admin user",
        r#"
        INSERT INTO users (username, password, full_name, email, role)
        VALUES ('admin', '$2b$10$X7bE6JZAx.m1oPXgJ3A/1.6eF1WGJr.nLWYJnPZD5GYPk2bBFLm9e', 'Administrador', 'admin@example.com', 'admin')
        ON CONFLICT (username) DO NOTHING
        "#,
    ),
    stmt(
        "seed leads",
        r#"
        INSERT INTO leads (name, email, phone, company, status, source, notes)
        SELECT v.name, v.email, v.phone, v.company, v.status::lead_status, v.source, v.notes
        FROM (VALUES
            ('Tecnología Innovadora S.A.', 'contacto@tecnologiainnovadora.com', '+5491198765432', 'Tecnología Innovadora', 'nuevo', 'web', 'Interesado en implementación de sistema CRM'),
            ('Distribuidora Global', 'ventas@distribuidoraglobal.com', '+5491187654321', 'Distribuidora Global', 'contactado', 'referido', 'Necesita automatizar gestión de clientes'),
            ('Servicios Profesionales', 'info@serviciosprofesionales.com', '+5491176543210', 'Servicios Profesionales', 'negociación', 'linkedin', 'En proceso de evaluar propuesta'),
            ('Manufacturas del Sur', 'compras@manufacturasdelsur.com', '+5491165432109', 'Manufacturas del Sur', 'cerrado', 'evento', 'Contrato firmado para implementación en Q3'),
            ('Consultora Estratégica', 'proyectos@consultoraest.com', '+5491154321098', 'Consultora Estratégica', 'perdido', 'anuncio', 'Decidieron ir con otro proveedor')
        ) AS v(name, email, phone, company, status, source, notes)
        WHERE NOT EXISTS (SELECT 1 FROM leads)
        "#,
    ),
    stmt(
        "seed gemini_settings",
        r#"
        INSERT INTO gemini_settings (model, profession_level, temperature, max_tokens)
        SELECT 'gemini-pro', 'professional', 70, 500
        WHERE NOT EXISTS (SELECT 1 FROM gemini_settings)
        "#,
    ),
    stmt(
        "seed dashboard_stats",
        r#"
        INSERT INTO dashboard_stats (total_leads, new_leads_this_month, converted_leads_this_month, total_messages)
        SELECT 5, 3, 1, 0
        WHERE NOT EXISTS (SELECT 1 FROM dashboard_stats)
        "#,
    ),
];

/// Sequência completa, na ordem em que é executada.
pub fn default_plan() -> Vec<InitStatement> {
    SCHEMA_STATEMENTS.iter().chain(SEED_STATEMENTS).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_is_idempotent_by_construction() {
        for s in SCHEMA_STATEMENTS {
            let sql = s.sql.to_uppercase();
            let guarded = sql.contains("IF NOT EXISTS") || sql.contains("DUPLICATE_OBJECT");
            assert!(guarded, "{} não é idempotente", s.name);
        }
    }

    #[test]
    fn every_seed_is_guarded() {
        for s in SEED_STATEMENTS {
            let sql = s.sql.to_uppercase();
            assert!(
                sql.contains("ON CONFLICT") || sql.contains("WHERE NOT EXISTS"),
                "{} pode duplicar linhas",
                s.name
            );
        }
    }

    #[test]
    fn plan_creates_parents_before_children() {
        let plan = default_plan();
        let position = |name: &str| plan.iter().position(|s| s.name == name).unwrap();

        assert!(position("table users") < position("table leads"));
        assert!(position("table leads") < position("table activities"));
        assert!(position("type lead_status") < position("table leads"));
        assert!(position("table surveys") < position("seed admin user"));
        assert_eq!(plan.len(), SCHEMA_STATEMENTS.len() + SEED_STATEMENTS.len());
    }
}
