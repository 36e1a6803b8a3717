//! Submit action of the product form.
//!
//! The action does not know how a product is created; it hands the payload
//! to a [`ProductGateway`] and reflects the outcome through a [`SubmitSink`].

use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::ProductCreated;
use contracts::domain::a001_product::form::ProductFormData;

/// Route shown after a product was created
pub const AFTER_CREATE_ROUTE: &str = "/products";

/// Everything the product creation service needs
#[derive(Debug, Clone)]
pub struct SubmitPayload<F> {
    pub form: ProductFormData,
    pub image: Option<F>,
    pub auth_token: Option<String>,
}

/// Remote product creation service
#[async_trait(?Send)]
pub trait ProductGateway<F> {
    /// Create a product. On failure returns the messages to show.
    async fn add(&self, payload: SubmitPayload<F>) -> Result<ProductCreated, Vec<String>>;
}

/// Where the submit action writes its side effects
pub trait SubmitSink {
    fn set_loading(&self, loading: bool);
    fn set_errors(&self, errors: Vec<String>);
    fn navigate(&self, path: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(ProductCreated),
    Failed(usize),
}

/// Why a submit request was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    GateClosed,
    AlreadyLoading,
}

pub fn check_ready(gate_open: bool, loading: bool) -> Result<(), SubmitBlocked> {
    if !gate_open {
        Err(SubmitBlocked::GateClosed)
    } else if loading {
        Err(SubmitBlocked::AlreadyLoading)
    } else {
        Ok(())
    }
}

/// Run the submit action unless the gate is closed or a submit is in flight.
/// A blocked submit never reaches the gateway.
pub async fn submit_if_ready<F, G, S>(
    gate_open: bool,
    loading: bool,
    gateway: &G,
    payload: SubmitPayload<F>,
    sink: &S,
) -> Result<SubmitOutcome, SubmitBlocked>
where
    G: ProductGateway<F> + ?Sized,
    S: SubmitSink + ?Sized,
{
    check_ready(gate_open, loading)?;
    Ok(run_submit(gateway, payload, sink).await)
}

pub async fn run_submit<F, G, S>(gateway: &G, payload: SubmitPayload<F>, sink: &S) -> SubmitOutcome
where
    G: ProductGateway<F> + ?Sized,
    S: SubmitSink + ?Sized,
{
    sink.set_loading(true);
    let result = gateway.add(payload).await;
    let outcome = match result {
        Ok(created) => {
            sink.set_errors(Vec::new());
            sink.navigate(AFTER_CREATE_ROUTE);
            SubmitOutcome::Created(created)
        }
        Err(errors) => {
            let count = errors.len();
            sink.set_errors(errors);
            SubmitOutcome::Failed(count)
        }
    };
    sink.set_loading(false);
    outcome
}
