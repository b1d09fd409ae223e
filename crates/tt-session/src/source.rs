use tt_location::{Activation, LocationError, LocationSource, PermissionScope};

use crate::{SessionObserver, SessionResult};

/// Bring `source` up and tell the observer how it went.
///
/// A foreground-only activation is a success that still reports the denied
/// background permission.  On failure the error has already been passed to
/// [`SessionObserver::on_error`].
pub(crate) async fn enable_source<S, O>(source: &mut S, observer: &mut O) -> SessionResult<Activation>
where
    S: LocationSource,
    O: SessionObserver,
{
    match source.enable().await {
        Ok(activation) => {
            observer.on_source_enabled(activation);
            if activation == Activation::ForegroundOnly {
                let denied = LocationError::PermissionDenied(PermissionScope::Background);
                observer.on_error(&denied.into());
            }
            Ok(activation)
        }
        Err(e) => {
            let err = e.into();
            observer.on_error(&err);
            Err(err)
        }
    }
}
