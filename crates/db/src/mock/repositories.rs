use chairtime_core::models::availability::DayAvailability;
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::{
    DbAppointment, DbAppointmentDetail, DbBarber, DbBarbershop, DbBookedSpan, DbClient,
    DbDayAvailability, DbMonthlyRevenue, DbPayment, DbService,
};

// Mock repositories for testing
mock! {
    pub BarbershopRepo {
        pub async fn create_barbershop(
            &self,
            name: &'static str,
            slug: &'static str,
            description: Option<&'static str>,
            is_active: bool,
        ) -> eyre::Result<DbBarbershop>;

        pub async fn get_barbershop_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBarbershop>>;

        pub async fn get_barbershop_by_slug(
            &self,
            slug: &'static str,
        ) -> eyre::Result<Option<DbBarbershop>>;

        pub async fn list_barbershops(&self) -> eyre::Result<Vec<DbBarbershop>>;

        pub async fn delete_barbershop(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub ServiceRepo {
        pub async fn get_service_by_id(
            &self,
            barbershop_id: Uuid,
            id: Uuid,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn list_services(
            &self,
            barbershop_id: Uuid,
            active_only: bool,
        ) -> eyre::Result<Vec<DbService>>;

        pub async fn delete_service(
            &self,
            barbershop_id: Uuid,
            id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub BarberRepo {
        pub async fn get_barber_by_id(
            &self,
            barbershop_id: Uuid,
            id: Uuid,
        ) -> eyre::Result<Option<DbBarber>>;

        pub async fn list_barbers(
            &self,
            barbershop_id: Uuid,
        ) -> eyre::Result<Vec<DbBarber>>;

        pub async fn delete_barber_and_related(
            &self,
            barbershop_id: Uuid,
            id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub ClientRepo {
        pub async fn create_client(
            &self,
            barbershop_id: Uuid,
            name: &'static str,
            phone: &'static str,
            email: Option<&'static str>,
        ) -> eyre::Result<DbClient>;

        pub async fn find_client_by_phone(
            &self,
            barbershop_id: Uuid,
            phone: &'static str,
        ) -> eyre::Result<Option<DbClient>>;
    }
}

mock! {
    pub AvailabilityRepo {
        pub async fn upsert_week(
            &self,
            barbershop_id: Uuid,
            days: Vec<DayAvailability>,
        ) -> eyre::Result<()>;

        pub async fn get_week(
            &self,
            barbershop_id: Uuid,
        ) -> eyre::Result<Vec<DbDayAvailability>>;

        pub async fn get_day(
            &self,
            barbershop_id: Uuid,
            day_of_week: i16,
        ) -> eyre::Result<Option<DbDayAvailability>>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn get_appointment_by_id(
            &self,
            barbershop_id: Uuid,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn list_appointments(
            &self,
            barbershop_id: Uuid,
            date: Option<NaiveDate>,
            status: Option<&'static str>,
        ) -> eyre::Result<Vec<DbAppointmentDetail>>;

        pub async fn active_spans_for_barber(
            &self,
            barbershop_id: Uuid,
            barber_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbBookedSpan>>;

        pub async fn update_status(
            &self,
            barbershop_id: Uuid,
            id: Uuid,
            status: &'static str,
        ) -> eyre::Result<DbAppointment>;
    }
}

mock! {
    pub PaymentRepo {
        pub async fn complete_appointment_with_payment(
            &self,
            barbershop_id: Uuid,
            appointment_id: Uuid,
            barber_id: Uuid,
            amount: f64,
            payment_method: &'static str,
            payment_date: NaiveDate,
            barber_commission: f64,
            shop_revenue: f64,
        ) -> eyre::Result<DbPayment>;

        pub async fn revenue_for_date(
            &self,
            barbershop_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<f64>;

        pub async fn monthly_totals(
            &self,
            barbershop_id: Uuid,
            year: i32,
        ) -> eyre::Result<Vec<DbMonthlyRevenue>>;
    }
}
