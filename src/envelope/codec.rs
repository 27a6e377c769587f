//! Request, response and fault envelopes.

use super::scan::{has_tag, int_field, int_list_field, text_field, MissingField};
use super::types::{DecodeError, FactorReply, FactorRequest, OPERATION, SOAP_ENV_NS};
use super::xml::Element;

/// A request without `<numbers>` filters nothing.
pub const NUMBERS_WHEN_MISSING: MissingField<Vec<i64>> = MissingField::Default(Vec::new());

/// A request without `<divisor>` keeps every number.
pub const DIVISOR_WHEN_MISSING: MissingField<i64> = MissingField::Default(1);

fn envelope(body: Element) -> String {
    Element::new("soap:Envelope")
        .attr("xmlns:soap", SOAP_ENV_NS)
        .child(Element::new("soap:Body").child(body))
        .to_document()
}

fn join(numbers: &[i64], sep: &str) -> String {
    numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Build the `findFactors` request envelope.
pub fn encode_request(request: &FactorRequest) -> String {
    envelope(
        Element::new(OPERATION)
            .child(Element::leaf("numbers", join(&request.numbers, ",")))
            .child(Element::leaf("divisor", request.divisor.to_string())),
    )
}

/// Pull `numbers` and `divisor` out of a request envelope.
///
/// Absent fields fall back to [`NUMBERS_WHEN_MISSING`] and
/// [`DIVISOR_WHEN_MISSING`]; only unparsable tokens are errors.
pub fn decode_request(doc: &str) -> Result<FactorRequest, DecodeError> {
    let numbers = int_list_field(doc, "numbers", NUMBERS_WHEN_MISSING)?;
    let divisor = int_field(doc, "divisor", DIVISOR_WHEN_MISSING)?;
    Ok(FactorRequest { numbers, divisor })
}

/// Wrap a filtered list in the response envelope.
pub fn encode_response(result: &[i64]) -> String {
    envelope(
        Element::new("findFactorsResponse").child(Element::leaf("result", join(result, ", "))),
    )
}

/// Wrap a failure message in a fault envelope.
pub fn encode_fault(code: &str, message: &str) -> String {
    envelope(
        Element::new("soap:Fault")
            .child(Element::leaf("faultcode", code))
            .child(Element::leaf("faultstring", message)),
    )
}

/// Client-side decode of a reply. A fault takes precedence over a result,
/// even when its `<faultstring>` is empty.
pub fn decode_response(doc: &str) -> Result<FactorReply, DecodeError> {
    if has_tag(doc, "faultstring") {
        let code = text_field(doc, "faultcode").unwrap_or_default();
        let message = text_field(doc, "faultstring").unwrap_or_default();
        return Ok(FactorReply::Fault { code, message });
    }
    if !has_tag(doc, "result") {
        return Err(DecodeError::MissingResult);
    }
    // An empty <result> is a legitimate empty list.
    int_list_field(doc, "result", NUMBERS_WHEN_MISSING).map(FactorReply::Result)
}
