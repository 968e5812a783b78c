mod vessel;
