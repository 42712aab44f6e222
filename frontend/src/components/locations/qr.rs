use common::model::Location;
use common::qr::QrPayload;
use qrcode::QrCode;
use qrcode::render::svg;

/// SVG markup of the QR code participants scan at `location`.
pub fn location_svg(location: &Location) -> Result<String, qrcode::types::QrError> {
    let payload = QrPayload::for_location(location).to_string();
    let code = QrCode::new(payload.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .quiet_zone(true)
        .build())
}
