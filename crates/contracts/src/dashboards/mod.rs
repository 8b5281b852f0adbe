pub mod d400_transaction_summary;
