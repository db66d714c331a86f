use gloo_net::http::Request;
use tourism_core::{
    Generation, PendingRequest, RequestError, TourismRequest, TourismResponse, TOURISM_ENDPOINT,
};

pub async fn ask(req: &TourismRequest) -> Result<TourismResponse, RequestError> {
    let resp = Request::post(TOURISM_ENDPOINT)
        .json(req)
        .map_err(|e| RequestError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| RequestError::Transport(e.to_string()))?;

    if !resp.ok() {
        return Err(RequestError::Status(resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| RequestError::Transport(e.to_string()))?;

    TourismResponse::from_body(&body)
}

pub async fn send(pending: PendingRequest) -> (Generation, Result<TourismResponse, RequestError>) {
    let result = ask(&pending.payload).await;
    (pending.generation, result)
}
