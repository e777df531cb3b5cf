use anyhow::Context;

use klimatpro_storefront::{StorefrontConfig, StorefrontSession};

/// Loads the catalog once and prints the resulting view as JSON.
///
/// `klimatpro-storefront inquire <name> <phone> <message>` additionally sends
/// one contact inquiry to the configured sink.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    klimatpro_observability::init();

    let config = StorefrontConfig::from_env();
    let source = config.product_source();

    let mut session = StorefrontSession::new(config.price_max);
    session.load_from(source.as_ref()).await;

    tracing::info!(
        products = session.products().len(),
        brands = ?session.facets().brands,
        types = ?session.facets().types,
        "storefront ready"
    );

    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("inquire") {
        let form = session.contact_form_mut();
        form.set_name(args.next().unwrap_or_default());
        form.set_phone(args.next().unwrap_or_default());
        form.set_message(args.next().unwrap_or_default());

        let sink = config.inquiry_sink();
        session
            .submit_inquiry(sink.as_ref())
            .await
            .context("contact form is incomplete")?;
    }

    println!("{}", serde_json::to_string_pretty(&session.view())?);
    Ok(())
}
