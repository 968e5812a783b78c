use extractor::Extractor;
use portfeed_rs::DataDir;
use processors::DataProcessor;
use sqlite::SqliteAdapter;

use crate::settings::Settings;

pub struct App {
    extractor: Extractor,
}

impl App {
    pub async fn build(settings: &Settings) -> App {
        let adapter = SqliteAdapter::new(&settings.sqlite).await.unwrap();
        let processor = DataProcessor::new(Box::new(adapter));
        let extractor = Extractor::new(DataDir::new(settings.data_dir.clone()), Box::new(processor));

        App { extractor }
    }

    pub async fn run(self) {
        self.extractor.run().await;
    }
}
