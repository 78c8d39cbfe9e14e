pub mod d410_asset_report;
