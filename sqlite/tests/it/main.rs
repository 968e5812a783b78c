mod helper;
mod vessels;
