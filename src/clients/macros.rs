/// Generate a client method that sends one request variant and awaits its
/// oneshot reply. Channel failures map to the error's
/// `ActorCommunicationError` variant.
macro_rules! client_method {
    (
        $(#[$meta:meta])*
        $client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty
            as $request:ident::$variant:ident, Error = $error_type:ty
    ) => {
        impl $client {
            $(#[$meta])*
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

pub(crate) use client_method;
