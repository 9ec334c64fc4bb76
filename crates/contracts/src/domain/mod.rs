pub mod sales_invoice;
