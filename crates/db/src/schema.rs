use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create barbershops table (one row per tenant)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS barbershops (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            slug VARCHAR(255) NOT NULL UNIQUE,
            description TEXT NULL,
            logo_url TEXT NULL,
            banner_url TEXT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create accounts table (master-provisioned logins)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            role VARCHAR(32) NOT NULL,
            barbershop_id UUID NULL REFERENCES barbershops(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create barbers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS barbers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            barbershop_id UUID NOT NULL REFERENCES barbershops(id),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            phone VARCHAR(64) NULL,
            specialty VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            barbershop_id UUID NOT NULL REFERENCES barbershops(id),
            name VARCHAR(255) NOT NULL,
            duration_minutes INTEGER NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            description TEXT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create clients table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            barbershop_id UUID NOT NULL REFERENCES barbershops(id),
            name VARCHAR(255) NOT NULL,
            phone VARCHAR(64) NOT NULL,
            email VARCHAR(255) NULL,
            notes TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_phone_per_shop UNIQUE (barbershop_id, phone)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create availability table (one row per shop and weekday)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            barbershop_id UUID NOT NULL REFERENCES barbershops(id),
            day_of_week SMALLINT NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            breaks JSONB NOT NULL DEFAULT '[]',
            CONSTRAINT valid_weekday CHECK (day_of_week BETWEEN 0 AND 6),
            CONSTRAINT valid_window CHECK (end_time > start_time),
            CONSTRAINT unique_day_per_shop UNIQUE (barbershop_id, day_of_week)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            barbershop_id UUID NOT NULL REFERENCES barbershops(id),
            client_id UUID NOT NULL REFERENCES clients(id),
            barber_id UUID NOT NULL REFERENCES barbers(id),
            service_id UUID NOT NULL REFERENCES services(id),
            appointment_date DATE NOT NULL,
            start_time TIME NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'pending',
            notes TEXT NULL,
            price_at_booking DOUBLE PRECISION NOT NULL,
            duration_at_booking INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create payments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS payments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            barbershop_id UUID NOT NULL REFERENCES barbershops(id),
            appointment_id UUID NOT NULL REFERENCES appointments(id),
            barber_id UUID NOT NULL REFERENCES barbers(id),
            amount DOUBLE PRECISION NOT NULL,
            payment_method VARCHAR(32) NOT NULL,
            payment_date DATE NOT NULL DEFAULT CURRENT_DATE,
            barber_commission DOUBLE PRECISION NOT NULL,
            shop_revenue DOUBLE PRECISION NOT NULL,
            notes TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_accounts_barbershop_id ON accounts(barbershop_id);
        CREATE INDEX IF NOT EXISTS idx_barbers_barbershop_id ON barbers(barbershop_id);
        CREATE INDEX IF NOT EXISTS idx_services_barbershop_id ON services(barbershop_id);
        CREATE INDEX IF NOT EXISTS idx_clients_barbershop_id ON clients(barbershop_id);
        CREATE INDEX IF NOT EXISTS idx_availability_barbershop_id ON availability(barbershop_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_barbershop_id ON appointments(barbershop_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_barber_date ON appointments(barber_id, appointment_date);
        CREATE INDEX IF NOT EXISTS idx_appointments_status ON appointments(status);
        CREATE INDEX IF NOT EXISTS idx_payments_barbershop_id ON payments(barbershop_id);
        CREATE INDEX IF NOT EXISTS idx_payments_payment_date ON payments(payment_date);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
