//! WSDL-style service descriptor.
//!
//! Describes the single `findFactors` operation. It is rendered once when
//! the service is built and then served unchanged.

use super::types::OPERATION;
use super::xml::Element;

const WSDL_NS: &str = "http://schemas.xmlsoap.org/wsdl/";
const WSDL_SOAP_NS: &str = "http://schemas.xmlsoap.org/wsdl/soap/";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
const SOAP_HTTP_TRANSPORT: &str = "http://schemas.xmlsoap.org/soap/http";

/// Target namespace of the service definitions.
pub const TARGET_NS: &str = "http://example.com/factorservice";

fn part(name: &str, ty: &str) -> Element {
    Element::new("part").attr("name", name).attr("type", ty)
}

fn literal_body(direction: &str) -> Element {
    Element::new(direction).child(Element::new("soap:body").attr("use", "literal"))
}

/// Render the descriptor, advertising `location` as the service address.
pub fn render(location: &str) -> String {
    let request_msg = format!("{}Request", OPERATION);
    let response_msg = format!("{}Response", OPERATION);

    Element::new("definitions")
        .attr("name", "FactorService")
        .attr("targetNamespace", TARGET_NS)
        .attr("xmlns", WSDL_NS)
        .attr("xmlns:soap", WSDL_SOAP_NS)
        .attr("xmlns:tns", TARGET_NS)
        .attr("xmlns:xsd", XSD_NS)
        .child(
            Element::new("message")
                .attr("name", request_msg.as_str())
                .child(part("numbers", "xsd:string"))
                .child(part("divisor", "xsd:int")),
        )
        .child(
            Element::new("message")
                .attr("name", response_msg.as_str())
                .child(part("result", "xsd:string")),
        )
        .child(
            Element::new("portType").attr("name", "FactorServicePortType").child(
                Element::new("operation")
                    .attr("name", OPERATION)
                    .child(Element::new("input").attr("message", format!("tns:{}", request_msg)))
                    .child(Element::new("output").attr("message", format!("tns:{}", response_msg))),
            ),
        )
        .child(
            Element::new("binding")
                .attr("name", "FactorServiceBinding")
                .attr("type", "tns:FactorServicePortType")
                .child(
                    Element::new("soap:binding")
                        .attr("style", "rpc")
                        .attr("transport", SOAP_HTTP_TRANSPORT),
                )
                .child(
                    Element::new("operation")
                        .attr("name", OPERATION)
                        .child(Element::new("soap:operation").attr("soapAction", OPERATION))
                        .child(literal_body("input"))
                        .child(literal_body("output")),
                ),
        )
        .child(
            Element::new("service").attr("name", "FactorService").child(
                Element::new("port")
                    .attr("name", "FactorServicePort")
                    .attr("binding", "tns:FactorServiceBinding")
                    .child(Element::new("soap:address").attr("location", location)),
            ),
        )
        .to_document()
}
