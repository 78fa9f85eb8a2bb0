//! AWS Lambda handler: evaluate all three calculators for one request
//!
//! POST a JSON body with any of `mortgage`, `student_loan` and `gas`; missing
//! objects and fields take the documented defaults. The response carries the
//! raw results plus display strings.

use lambda_http::http::{Method, StatusCode};
use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;
use rate_impact::calculator::{
    Gas, GasInputs, GasResult, Mortgage, MortgageInputs, MortgageResult, StudentLoan,
    StudentLoanInputs, StudentLoanResult,
};
use rate_impact::present::format_currency;
use rate_impact::profile::Profile;
use rate_impact::{Calculator, ImpactSummary};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
struct CalculateRequest {
    #[serde(default)]
    mortgage: MortgageInputs,
    #[serde(default)]
    student_loan: StudentLoanInputs,
    #[serde(default)]
    gas: GasInputs,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    mortgage: MortgageResult,
    student_loan: StudentLoanResult,
    gas: GasResult,
    summary: ImpactSummary,
    formatted: FormattedSummary,
}

#[derive(Debug, Serialize)]
struct FormattedSummary {
    mortgage_delta: String,
    student_interest: String,
    gas_impact: String,
}

fn calculate(body: &[u8]) -> serde_json::Result<CalculateResponse> {
    let request: CalculateRequest = if body.iter().all(u8::is_ascii_whitespace) {
        CalculateRequest::default()
    } else {
        serde_json::from_slice(body)?
    };

    let profile = Profile {
        mortgage: request.mortgage,
        student_loan: request.student_loan,
        gas: request.gas,
        ..Profile::new("request")
    };
    let summary = profile.summary().impact;

    Ok(CalculateResponse {
        mortgage: Mortgage::compute(&profile.mortgage),
        student_loan: StudentLoan::compute(&profile.student_loan),
        gas: Gas::compute(&profile.gas),
        formatted: FormattedSummary {
            mortgage_delta: format_currency(summary.mortgage_delta),
            student_interest: format_currency(summary.student_interest),
            gas_impact: format_currency(summary.gas_impact),
        },
        summary,
    })
}

fn json_response(status: StatusCode, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    if event.method() != Method::POST {
        let body = json!({ "error": "use POST" }).to_string();
        return json_response(StatusCode::METHOD_NOT_ALLOWED, body);
    }

    let body: &[u8] = event.body();
    match calculate(body) {
        Ok(response) => json_response(StatusCode::OK, serde_json::to_string(&response)?),
        Err(e) => {
            log::warn!("rejecting malformed request: {e}");
            let body = json!({ "error": format!("invalid request body: {e}") }).to_string();
            json_response(StatusCode::BAD_REQUEST, body)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
