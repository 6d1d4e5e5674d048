use managed_chatkit_functions::{platform, session, telemetry};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();
    run(handler).await
}

/// /api/create-session: create a ChatKit session.
///
/// # Stub Implementation
/// Returns 500 with a JSON error until the session service is wired in.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    platform::serve(session::create_session, req).await
}
