mod orders;
mod payments;

pub(crate) use orders::PgOrdersRepository;
pub(crate) use payments::PgPaymentsRepository;
